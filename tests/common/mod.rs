pub mod mock_chat;
pub mod mock_teleporter;

pub use mock_chat::MockChat;
pub use mock_teleporter::MockTeleporter;
