mod traits;
mod viacep_address_repository;

pub use traits::AddressRepository;
pub use viacep_address_repository::ViaCepAddressRepository;
