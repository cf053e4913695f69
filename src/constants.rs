/// Name reported in the capabilities declaration.
pub const PLUGIN_NAME: &str = "hello-world";

/// The only action this plugin understands.
pub const ACTION_PREPARE: &str = "prepare";

/// Argument carrying the user text for [`ACTION_PREPARE`].
pub const PARAM_TEXT: &str = "text";

/// Environment variable that pins the prompt fragment for every call.
pub const FIXED_FRAGMENT_ENV: &str = "HELLO_WORLD_PROMPT_FRAGMENT";

/// Message returned inside the guard payload when input does not mention "hello".
pub const GUARD_MESSAGE: &str =
    "Plugin only accepts send hello to LLM. All another knows human brain.";

/// Separator between the transformed text and the prompt fragment.
pub const FRAGMENT_SEPARATOR: &str = "\n\n";

/// Questions for the LLM. One is picked per `prepare` call.
pub const PROMPT_FRAGMENTS: &[&str] = &[
    "In which language was the first Hello, World! program printed?",
    "In which year was the first Hello, World! program ever printed?",
    "In which year was the first Hello, World! printed in C?",
    "In which year was the first Hello, World! printed in Java?",
    "In which year was the first Hello, World! printed in Python?",
    "In which year was the first Hello, World! printed in Ruby?",
    "In which year was the first Hello, World! printed in Go?",
    "In which year was the first Hello, World! printed in JavaScript?",
    "In which year was the first Hello, World! printed in Rust?",
    "In which year was the first Hello, World! printed in PHP?",
    "What is the most printed programming language for Hello, World!?",
];
