pub const GREETING_PREFIX: &str = "Hello, ";
pub const GREETING_SUFFIX: &str = "!";

/// Builds `"Hello, {name}!"`. The name is echoed verbatim, empty included.
pub fn greet(name: &str) -> String {
    let greeting = format!("{}{}{}", GREETING_PREFIX, name, GREETING_SUFFIX);
    tracing::debug!("Greeting produced: {:?}", greeting);
    greeting
}
