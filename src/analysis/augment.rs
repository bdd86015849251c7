//! Text augmentation with bridge words
//!
//! New text is tokenized into words; between every adjacent pair one bridge
//! word (if any exist) is drawn uniformly at random and inserted.

use super::bridge::BridgeWordFinder;
use crate::graph::word_graph::WordGraph;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::DeterminismMode;
use rand::Rng;

/// Inserts bridge words into text
#[derive(Debug, Clone)]
pub struct TextAugmenter<'g> {
    finder: BridgeWordFinder<'g>,
    tokenizer: Tokenizer,
}

impl<'g> TextAugmenter<'g> {
    pub fn new(graph: &'g WordGraph) -> Self {
        Self {
            finder: BridgeWordFinder::new(graph),
            tokenizer: Tokenizer::new(),
        }
    }

    /// Builder method: set the tokenizer applied to input text
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Builder method: set determinism mode of the bridge lookup
    pub fn with_determinism(mut self, mode: DeterminismMode) -> Self {
        self.finder = self.finder.with_determinism(mode);
        self
    }

    /// Augment `text`, returning the words joined by single spaces
    pub fn augment<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        self.augment_tokens(text, rng).join(" ")
    }

    /// Augment `text`, returning the output word sequence
    ///
    /// Original words keep their relative order. A pair where either word is
    /// unknown to the graph gets no insertion.
    pub fn augment_tokens<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Vec<String> {
        trace_stage!("augment_text");

        let words = self.tokenizer.word_tokens(text);
        let mut output = Vec::with_capacity(words.len() * 2);

        for pair in words.windows(2) {
            output.push(pair[0].to_string());

            let bridges = self.finder.find(pair[0], pair[1]).unwrap_or_default();
            if !bridges.is_empty() {
                let pick = rng.random_range(0..bridges.len());
                output.push(bridges[pick].clone());
            }
        }
        if let Some(last) = words.last() {
            output.push(last.to_string());
        }

        trace_event!(
            words = words.len(),
            inserted = output.len() - words.len(),
            "text augmented"
        );
        output
    }
}

/// Augment `text` with bridge words drawn from `rng`
pub fn augment_text<R: Rng + ?Sized>(graph: &WordGraph, text: &str, rng: &mut R) -> String {
    TextAugmenter::new(graph).augment(text, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> WordGraph {
        build_graph(["Hello, world! This is a test.", "Hello again."])
    }

    #[test]
    fn test_insert_bridge_words() {
        let graph = sample();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            augment_text(&graph, "Hello This is a test", &mut rng),
            "Hello world This is a test"
        );
    }

    #[test]
    fn test_punctuation_dropped() {
        let graph = sample();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            augment_text(&graph, "Hello,  This!! is", &mut rng),
            "Hello world This is"
        );
    }

    #[test]
    fn test_unknown_words_pass_through() {
        let graph = sample();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            augment_text(&graph, "seek new seek new", &mut rng),
            "seek new seek new"
        );
    }

    #[test]
    fn test_zero_and_one_token() {
        let graph = sample();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(augment_text(&graph, "", &mut rng), "");
        assert_eq!(augment_text(&graph, "...", &mut rng), "");
        assert_eq!(augment_text(&graph, "Hello", &mut rng), "Hello");
    }

    #[test]
    fn test_choice_is_one_of_the_bridges() {
        let graph = build_graph(["seek zeta new", "seek alpha new"]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = TextAugmenter::new(&graph).augment_tokens("seek new", &mut rng);
            assert_eq!(out.len(), 3);
            assert!(out[1] == "zeta" || out[1] == "alpha");
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let graph = build_graph(["a b c", "a x c", "a y c", "c q a", "c r a"]);
        let augmenter = TextAugmenter::new(&graph);
        let first = augmenter.augment("a c a c", &mut StdRng::seed_from_u64(99));
        let second = augmenter.augment("a c a c", &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
        assert_eq!(first.split(' ').count(), 7);
    }
}
