pub mod currency;
pub mod history;
pub mod record;
pub mod settings;
pub mod theme;
