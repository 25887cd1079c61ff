pub mod interface;
pub mod languages;
pub mod deepl;
pub mod gateway;

pub use interface::*;
pub use deepl::DeepLClient;
pub use gateway::{TranslationGateway, TranslationRequest, TranslationResponse};
pub use languages::{supported_languages, SupportedLanguage};
