pub mod engagement_service;
pub mod mention_service;
pub mod momentum_service;
pub mod narrative_service;
pub mod regime_service;
pub mod report_service;
pub mod sentiment_service;
pub mod windowing;
