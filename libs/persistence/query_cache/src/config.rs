use std::time::Duration;

#[derive(Debug, Clone)]
pub struct MemoryConfig {
    pub capacity: u64,
    pub ttl_secs: u64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_memory_capacity(),
            ttl_secs: default_memory_ttl_secs(),
        }
    }
}

fn default_memory_capacity() -> u64 { 10_000 }
fn default_memory_ttl_secs() -> u64 { 300 }

impl MemoryConfig {
    pub fn ttl(&self) -> Duration { Duration::from_secs(self.ttl_secs) }
}
