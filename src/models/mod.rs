pub mod question;

pub use question::{
    Classification, ClassifiedQuestion, CriticalQuestionEntry, QuestionType, RawQuestionUnit,
    TypeFrequency,
};
