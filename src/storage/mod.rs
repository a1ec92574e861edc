mod in_memory;

pub(crate) use in_memory::InMemorySessionStorage;
