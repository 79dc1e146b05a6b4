use std::sync::Arc;
use crate::discs::repository::DiscRepository;
use crate::discs::repository::json_disc_repository::JsonDiscRepository;
use crate::utils::store::JsonStore;

pub const DISCS_TABLE: &str = "discs";

pub fn create_disc_repository(store: Arc<JsonStore>) -> Box<dyn DiscRepository> {
    Box::new(JsonDiscRepository::new(store, DISCS_TABLE))
}
