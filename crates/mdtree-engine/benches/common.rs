// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* content and a [[wikilink]].\n\n- Bullet point\n  - Nested item\n- [x] Done item\n\n> Quoted text\n\n| a | b |\n| - | - |\n| 1 | 2 |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_lists(depth: usize, width: usize) -> String {
    let mut content = String::new();
    push_nested_items(&mut content, depth, width, 0);
    content
}

fn push_nested_items(content: &mut String, remaining_depth: usize, width: usize, level: usize) {
    if remaining_depth == 0 {
        return;
    }
    let indent = "  ".repeat(level);
    for i in 0..width {
        content.push_str(&format!("{indent}- Item {i} at level {level}\n"));
        push_nested_items(content, remaining_depth - 1, width, level + 1);
    }
}
