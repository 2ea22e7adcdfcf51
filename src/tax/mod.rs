pub mod advisor;
pub mod brackets;
pub mod conversation;
pub mod currency;
pub mod error;
pub mod faq;
pub mod report;
pub mod responder;

// Flat public surface for domain types and functions.
pub use advisor::{suggest, SuggestionTier};
#[allow(unused_imports)]
pub use brackets::{assess, bracket_for, compute_tax, TaxAssessment, TaxBracket, BRACKETS};
#[allow(unused_imports)]
pub use conversation::{Conversation, Message, Role};
pub use currency::format_inr;
pub use error::{non_negative, InputError};
#[allow(unused_imports)]
pub use faq::{FaqEntry, KnowledgeBase, FAQ};
pub use report::{read_result_json, Deduction, TaxResult};
#[allow(unused_imports)]
pub use responder::{extract_amount, Reply, Responder, Turn};
