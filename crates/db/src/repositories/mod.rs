//! Repository layer: one zero-sized struct per table, each taking `&PgPool`.

pub mod ativo_repo;
pub mod banco_repo;
pub mod categoria_repo;
pub mod cliente_repo;
pub mod customer_repo;
pub mod dashboard_repo;
pub mod investimento_repo;
pub mod invoice_repo;
pub mod reference_repo;
pub mod tipo_repo;
pub mod user_repo;

pub use ativo_repo::AtivoRepo;
pub use banco_repo::BancoRepo;
pub use categoria_repo::CategoriaRepo;
pub use cliente_repo::ClienteRepo;
pub use customer_repo::CustomerRepo;
pub use dashboard_repo::DashboardRepo;
pub use investimento_repo::InvestimentoRepo;
pub use invoice_repo::InvoiceRepo;
pub use reference_repo::ReferenceRepo;
pub use tipo_repo::TipoRepo;
pub use user_repo::UserRepo;
