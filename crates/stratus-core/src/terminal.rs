use std::io;

/// Interactive terminal used by every prompting stage.
///
/// `ask`/`ask_secret` return the raw answer; an empty string means the user
/// just pressed enter. Closed input is an `UnexpectedEof` error.
pub trait Terminal {
    fn ask(&mut self, label: &str) -> io::Result<String>;
    fn ask_secret(&mut self, label: &str) -> io::Result<String>;
    fn say(&mut self, message: &str);
    fn warn(&mut self, message: &str);
    fn ok(&mut self);
}
