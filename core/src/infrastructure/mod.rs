pub mod llm;
pub mod scratch;
pub mod session;
