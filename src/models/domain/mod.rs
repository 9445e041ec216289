pub mod frq_question;
pub mod mcq_question;
pub use frq_question::{FrqQuestion, Points, RubricCriterion};
pub use mcq_question::{ChoiceLabel, Choices, McqQuestion};
