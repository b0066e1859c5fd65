pub mod app_config;
pub mod booking_repo;
pub mod database;
pub mod schedule_repo;
pub mod train_repo;
pub mod user_repo;

pub use app_config::Config;
pub use booking_repo::BookingRepository;
pub use database::DbClient;
pub use schedule_repo::ScheduleRepository;
pub use train_repo::TrainRepository;
pub use user_repo::UserRepository;
