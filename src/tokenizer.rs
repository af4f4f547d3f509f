use std::sync::LazyLock;

use tiktoken_rs::{CoreBPE, o200k_base};

static TOK: LazyLock<Option<CoreBPE>> = LazyLock::new(|| match o200k_base() {
    Ok(bpe) => Some(bpe),
    Err(e) => {
        tracing::warn!("tokenizer init failed: {e}");
        None
    }
});

/// Count tokens in a string using the shared CoreBPE tokenizer, or `None`
/// if the tokenizer could not be built.
#[inline]
pub fn count(text: &str) -> Option<usize> {
    TOK.as_ref()
        .map(|bpe| bpe.encode_with_special_tokens(text).len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_count_is_stable() {
        assert_eq!(count("hello world"), Some(2));
        assert_eq!(count(""), Some(0));
    }
}
