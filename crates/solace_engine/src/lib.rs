pub mod classifier;
pub mod model;
pub mod pipeline;
pub mod responses;
pub mod snapshot;
pub mod template;
pub mod vectorizer;

pub use model::FittedModel;
pub use pipeline::{ConversationState, ResponsePipeline};
pub use template::TemplateStore;
