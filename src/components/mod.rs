pub mod carousel;
pub mod chart;
pub mod pagination;
pub mod weather_card;
