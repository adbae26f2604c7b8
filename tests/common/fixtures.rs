//! Test fixtures - reusable file contents for tests.

/// A JavaScript file with no directives
pub const EMPTY_JS: &str = "console.log('no requires');\n";

/// A CoffeeScript file with no directives
pub const EMPTY_COFFEE: &str = "x = 1\n";

/// `//= require` header followed by code
pub fn js_requiring(targets: &[&str]) -> String {
    header("//=", targets)
}

/// `#= require` header followed by code
pub fn coffee_requiring(targets: &[&str]) -> String {
    header("#=", targets)
}

fn header(marker: &str, targets: &[&str]) -> String {
    let mut content: String = targets
        .iter()
        .map(|target| format!("{marker} require {target}\n"))
        .collect();
    content.push_str("\nbody();\n");
    content
}
