mod docs;
mod sessions;
