//! Bundled quiz content for both supported languages.

mod de;
mod en;

use crate::model::{
    ContentBundle, LocalizedContent, OPTION_COUNT, Question, QuestionCatalog, QuestionError,
    QuizContent,
};

/// `(prompt, options, index of the correct option)`
type RawQuestion = (&'static str, [&'static str; OPTION_COUNT], usize);

/// The two bundled 10-question catalogs with their UI strings.
///
/// # Errors
///
/// Returns `QuestionError` if a bundled question fails validation.
pub fn bundled() -> Result<ContentBundle, QuestionError> {
    Ok(ContentBundle::new(en::content()?, de::content()?))
}

fn build(strings: LocalizedContent, raw: &[RawQuestion]) -> Result<QuizContent, QuestionError> {
    let questions = raw
        .iter()
        .map(|(prompt, options, correct)| Question::new(*prompt, *options, *correct))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(QuizContent {
        strings,
        questions: QuestionCatalog::new(questions)?,
    })
}
