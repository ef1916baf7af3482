pub mod mock_address_repository;

pub use mock_address_repository::MockAddressRepository;
