// Career recommendations: prompt → provider → strict decode → stream fallback → persist.
// All provider calls go through llm_client — no direct HTTP calls here.

pub mod extract;
pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod prompts;
