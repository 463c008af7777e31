use daybook_types::{BlogContext, GenerationResult};

/// Blog post generation, supplied by the pipeline consuming the context.
///
/// The multi-pass draft/review/revise machinery lives outside this
/// workspace; daybook only produces the [`BlogContext`] it eats.
pub trait Generator {
    fn generate(&self, context: &BlogContext) -> GenerationResult;
}

/// Secret-scrubbing pass applied to transcript text before it is persisted
/// anywhere shareable. Returns the cleaned text and the replacement count.
pub trait Sanitizer {
    fn sanitize(&self, text: &str) -> (String, usize);
}
