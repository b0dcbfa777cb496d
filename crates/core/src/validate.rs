use crate::error::{AssemblyError, RequiredField};
use folio_types::Article;

/// Checks every article for a title, a type and a body.
///
/// Articles are checked in list order and fields in that order, so the
/// first problem in the edition is the one reported.
pub fn validate_articles(articles: &[Article]) -> Result<(), AssemblyError> {
    for (i, article) in articles.iter().enumerate() {
        let checks = [
            (RequiredField::Title, &article.title),
            (RequiredField::Type, &article.article_type),
            (RequiredField::Body, &article.body),
        ];
        for (field, value) in checks {
            if value.trim().is_empty() {
                return Err(AssemblyError::MissingRequiredField {
                    position: i + 1,
                    field,
                });
            }
        }
    }
    Ok(())
}
