use crate::domain::OutputFormat;

pub const GENERIC_FAILURE_MESSAGE: &str = "Desculpe, ocorreu um erro ao processar seu áudio.";

pub fn document_failure_message(format: OutputFormat) -> String {
    format!(
        "O resumo foi gerado, mas houve um erro ao criar o {}.",
        format.label()
    )
}

pub fn document_caption(file_type: &str) -> String {
    format!("Segue o resumo em {}.", file_type.to_uppercase())
}
