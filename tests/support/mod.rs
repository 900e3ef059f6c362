pub mod mock_buffer;
