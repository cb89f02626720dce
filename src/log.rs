use std::panic::PanicHookInfo;

const RULE_WIDTH: usize = 50;

pub trait Logger {
    fn start(&self);
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
    fn panic(&self, info: &PanicHookInfo);
}

pub struct StdoutLogger {
    name: &'static str,
}

impl StdoutLogger {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Logger for StdoutLogger {
    fn start(&self) {
        println!("{}", self.name);
        println!("{}", rule());
    }

    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn warning(&self, message: &str) {
        println!("⚠️ {}", message);
    }

    fn error(&self, message: &str) {
        println!("❌ {}", message);
    }

    fn panic(&self, info: &PanicHookInfo) {
        eprintln!("💥 {} panicked: {}", self.name, info);
    }
}

pub fn get_logger(name: &'static str) -> Box<dyn Logger> {
    Box::new(StdoutLogger::new(name))
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Captures lines with the same markers the stdout logger uses.
    #[derive(Default)]
    pub struct MemoryLogger {
        lines: RefCell<Vec<String>>,
    }

    impl MemoryLogger {
        pub fn contains(&self, needle: &str) -> bool {
            self.lines.borrow().iter().any(|l| l.contains(needle))
        }

        fn push(&self, line: String) {
            self.lines.borrow_mut().push(line);
        }
    }

    impl Logger for MemoryLogger {
        fn start(&self) {}

        fn info(&self, message: &str) {
            self.push(message.to_string());
        }

        fn warning(&self, message: &str) {
            self.push(format!("⚠️ {}", message));
        }

        fn error(&self, message: &str) {
            self.push(format!("❌ {}", message));
        }

        fn panic(&self, info: &PanicHookInfo) {
            self.push(format!("💥 {}", info));
        }
    }
}
