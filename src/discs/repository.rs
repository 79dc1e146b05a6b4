pub mod json_disc_repository;

use crate::core::repository::Repository;
use crate::discs::domain::model::DiscEntity;

pub trait DiscRepository: Repository<DiscEntity> {}
