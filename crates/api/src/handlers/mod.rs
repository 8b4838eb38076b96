pub mod ativo;
pub mod banco;
pub mod categoria;
pub mod cliente;
pub mod command;
pub mod customer;
pub mod dashboard;
pub mod diagnostic;
pub mod investimento;
pub mod invoice;
pub mod references;
pub mod tipo;
pub mod user;
