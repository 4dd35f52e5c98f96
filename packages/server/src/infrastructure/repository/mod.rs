mod inmemory;

pub use inmemory::InMemoryLobbyRepository;
