use colored::Colorize;
use ktfix::api::{BatchResult, MessageLevel};

pub fn print_reports(batch: &BatchResult) {
    for report in &batch.reports {
        for message in &report.messages {
            let line = format!("{}: {}", report.path.display(), message.content);
            match message.level {
                MessageLevel::Info => println!("{}", line.dimmed()),
                MessageLevel::Success => println!("{}", line.green()),
                MessageLevel::Warning => println!("{}", line.yellow()),
                MessageLevel::Error => println!("{}", line.red()),
            }
        }
    }
}
