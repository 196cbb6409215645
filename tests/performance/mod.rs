//! Performance test module.
//!
//! This module contains helpers shared across performance tests.

/// Build a markdown-like document of roughly `target_bytes` bytes that
/// alternates prose paragraphs with fenced code blocks.
pub fn generate_document(target_bytes: usize) -> String {
    let paragraph = "Reading time depends on how dense the prose is and how much \
                     code the reader has to trace through line by line.\n\n";
    let block = "```rust\nfn add(a: i32, b: i32) -> i32 {\n    a + b\n}\n```\n\n";

    let mut doc = String::with_capacity(target_bytes + paragraph.len() + block.len());
    let mut i = 0;
    while doc.len() < target_bytes {
        if i % 4 == 3 {
            doc.push_str(block);
        } else {
            doc.push_str(paragraph);
        }
        i += 1;
    }
    doc
}
