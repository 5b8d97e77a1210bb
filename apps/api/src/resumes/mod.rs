// Resume persistence API: save, list, fetch, delete.
// All storage access goes through ResumeStore; handlers only validate input
// and translate store outcomes into responses. No retries anywhere, retry
// policy belongs to the caller.

pub mod handlers;
