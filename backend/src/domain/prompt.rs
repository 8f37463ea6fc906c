//! System prompt rendering.
//!
//! Pure string manipulation: either the teacher's custom template or a
//! default synthesized from personality and specialization fields, with
//! `{teacher_name}`, `{title}`, and `{domain}` placeholders substituted.

use crate::domain::teacher::Teacher;

/// Rendered system prompt for a teacher.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct GeneratedPrompt {
    /// Teacher the prompt was rendered for.
    pub teacher_id: crate::domain::teacher::TeacherId,
    /// Teacher display name, echoed for convenience.
    pub name: String,
    /// The rendered prompt text.
    pub system_prompt: String,
}

fn default_template(teacher: &Teacher) -> String {
    format!(
        "You are {name}, {title}.\n\n\
         You have these personality traits: {traits}.\n\
         Your teaching style is {style}.\n\
         You specialize in {domain}.",
        name = teacher.name,
        title = teacher.title,
        traits = teacher.personality.primary_traits.join(", "),
        style = teacher.personality.teaching_style,
        domain = teacher.specialization.primary_domain,
    )
}

/// Render the system prompt for a teacher.
#[must_use]
pub fn render(teacher: &Teacher) -> GeneratedPrompt {
    let template = teacher
        .system_prompt_template
        .clone()
        .unwrap_or_else(|| default_template(teacher));

    let system_prompt = template
        .replace("{teacher_name}", &teacher.name)
        .replace("{title}", &teacher.title)
        .replace("{domain}", &teacher.specialization.primary_domain);

    GeneratedPrompt {
        teacher_id: teacher.id,
        name: teacher.name.clone(),
        system_prompt,
    }
}
