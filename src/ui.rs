pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

pub fn display_skip(message: &str) {
    println!("\x1b[90m○ {}\x1b[0m", message); // Grey, neutral outcome
}

pub fn display_warning(message: &str) {
    eprintln!("\x1b[33m⚠\x1b[0m {}", message);
}

/// Print the step plan without executing anything (dry-run output)
pub fn display_plan(steps: &[String]) {
    println!("\n\x1b[1mPromotion plan:\x1b[0m");
    for (i, step) in steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
}
