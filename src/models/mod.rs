// ============ Model implementations ============

pub(crate) mod arima;
pub(crate) mod naive_bayes;
pub(crate) mod tfidf;

// Public model structs (for type annotations)
pub use arima::ManualArima;
pub use naive_bayes::MultinomialNaiveBayes;
pub use tfidf::TfidfVectorizer;
