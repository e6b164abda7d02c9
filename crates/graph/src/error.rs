use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Unit {unit} depends on {dependency}, which is not in the catalog")]
    DanglingDependency { unit: String, dependency: String },
}
