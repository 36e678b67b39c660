mod resend_mailer;
mod supabase_document_repository;
mod supabase_email_resolver;
mod traits;

pub use resend_mailer::ResendMailer;
pub use supabase_document_repository::SupabaseDocumentRepository;
pub use supabase_email_resolver::SupabaseEmailResolver;
pub use traits::{EmailResolver, ExpiringDocuments, Mailer};
