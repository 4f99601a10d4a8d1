// file: src/models/document.rs
// description: synthetic FAQ document model and batch generation
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// One question/answer pair as the ingestion endpoint expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    /// Deterministic dummy legal/insurance text for document `index`.
    /// The question carries `ID-{index}` and the answer carries the matching
    /// clause number and `DOC-{index}` reference, so retrieval results can be
    /// checked against the index that produced them.
    pub fn synthetic(index: u64) -> Self {
        Self {
            question: format!("What is the liability coverage for case ID-{index}?"),
            answer: format!(
                "For case ID-{index}, the policy covers up to $50,000 in damages \
                 under Section 4, Clause {}. Reference: DOC-{index}",
                index % 10
            ),
        }
    }
}

/// Upload payload: `{"entries": [...]}`. Built fresh per step and discarded
/// after the upload call, nothing is retained client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqBatch {
    pub entries: Vec<FaqEntry>,
}

impl FaqBatch {
    /// Generate `size` entries covering indices `[start_index, start_index + size)`.
    pub fn generate(size: u64, start_index: u64) -> Self {
        let entries = (start_index..start_index + size)
            .map(FaqEntry::synthetic)
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_batch_size_and_indices() {
        let batch = FaqBatch::generate(5, 20);
        assert_eq!(batch.len(), 5);

        for (offset, entry) in batch.entries.iter().enumerate() {
            let index = 20 + offset as u64;
            assert!(entry.question.contains(&format!("ID-{index}")));
            assert!(entry.answer.contains(&format!("DOC-{index}")));
            assert!(entry.answer.contains(&format!("Clause {}", index % 10)));
        }
    }

    #[test]
    fn test_generate_batch_deterministic() {
        let a = FaqBatch::generate(50, 0);
        let b = FaqBatch::generate(50, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_empty_batch() {
        let batch = FaqBatch::generate(0, 100);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_clause_numbers_wrap_at_ten() {
        let batch = FaqBatch::generate(3, 10);
        assert_eq!(batch.len(), 3);
        assert!(batch.entries[0].answer.contains("Clause 0"));
        assert!(batch.entries[1].answer.contains("Clause 1"));
        assert!(batch.entries[2].answer.contains("Clause 2"));
        assert!(batch.entries[0].question.contains("ID-10"));
        assert!(batch.entries[2].question.contains("ID-12"));
    }

    #[test]
    fn test_batch_wire_shape() {
        let batch = FaqBatch::generate(1, 0);
        let json = serde_json::to_value(&batch).unwrap();
        assert!(json.get("entries").unwrap().is_array());
        let entry = &json["entries"][0];
        assert!(entry.get("question").is_some());
        assert!(entry.get("answer").is_some());
    }
}
