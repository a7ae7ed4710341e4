//! Prompt templates for the four AI operations.
//!
//! These templates use basic `format!()` interpolation for type safety.
//! Missing variables will cause compile-time errors.

/// Build the instruction text for code generation.
///
/// The directives are strict on purpose: the response is pasted straight
/// into an editor, so the model must return a single code block and
/// nothing else.
///
/// # Example
/// ```
/// use codepix::prompts::generation_prompt;
///
/// let prompt = generation_prompt("a debounce helper", "typescript", "advanced");
/// assert!(prompt.contains("a debounce helper"));
/// assert!(prompt.contains("typescript"));
/// ```
pub fn generation_prompt(description: &str, language: &str, complexity: &str) -> String {
    format!(
        r#"You are a code generator that produces ONLY code. The response will be pasted
directly into a code editor, so it must be ready to run without modifications.
You will be given a task to implement in a specific programming language at a
certain complexity level. Return only the code, in a code block with the
appropriate syntax for the language.

Task: {description}

Requirements:
- Language: {language}
- Complexity: {complexity}
- Include only essential comments that explain complex logic
- Follow best practices for {language}
- Keep the code clean and concise
- Do NOT include usage examples
- Do NOT include explanatory text outside the code block
- Do NOT include commented-out code

Your entire response must be a single code block, nothing else."#
    )
}

/// Build the instruction text for code explanation.
pub fn explanation_prompt(code: &str) -> String {
    format!("Explain this code in clear, concise terms:\n\n{code}")
}

/// Build the instruction text for code translation.
///
/// # Example
/// ```
/// use codepix::prompts::translation_prompt;
///
/// let prompt = translation_prompt("print('hi')", "python", "ruby");
/// assert!(prompt.contains("python"));
/// assert!(prompt.contains("ruby"));
/// ```
pub fn translation_prompt(code: &str, source_language: &str, target_language: &str) -> String {
    format!(
        r#"Translate the following code from {source_language} to {target_language}.
Maintain the same functionality and logic while following {target_language}
conventions and best practices. Return only the translated code in a code block
with the appropriate syntax for {target_language}. Do not include any
explanations or additional text outside the code block.

Source code ({source_language}):
{code}

Translate to {target_language}:"#
    )
}

/// Build the instruction text for code optimization.
///
/// Unlike the other operations this one asks for prose as well: the
/// optimized code plus a short rationale for the changes.
pub fn optimization_prompt(code: &str, language: &str) -> String {
    format!(
        r#"Analyze and optimize the following {language} code. Provide specific
optimization suggestions covering:
1. Performance improvements
2. Code readability enhancements
3. Best practices recommendations
4. Security considerations (if applicable)
5. Memory usage optimizations

Original code:
{code}

Please provide:
1. The optimized code in a code block
2. A brief explanation of the optimizations made"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_prompt_contains_parameters() {
        let prompt = generation_prompt("binary search over a sorted vec", "rust", "intermediate");

        assert!(prompt.contains("binary search over a sorted vec"));
        assert!(prompt.contains("Language: rust"));
        assert!(prompt.contains("Complexity: intermediate"));
    }

    #[test]
    fn test_generation_prompt_forbids_prose() {
        let prompt = generation_prompt("anything", "go", "beginner");

        assert!(prompt.contains("ONLY code"));
        assert!(prompt.contains("Do NOT include usage examples"));
        assert!(prompt.contains("Do NOT include explanatory text"));
    }

    #[test]
    fn test_explanation_prompt_prefixes_code() {
        let code = "let x = 1;";
        let prompt = explanation_prompt(code);

        assert!(prompt.starts_with("Explain this code"));
        assert!(prompt.ends_with(code));
    }

    #[test]
    fn test_translation_prompt_names_both_languages() {
        let prompt = translation_prompt("console.log(1)", "javascript", "python");

        assert!(prompt.contains("from javascript to python"));
        assert!(prompt.contains("console.log(1)"));
        assert!(prompt.contains("Translate to python:"));
    }

    #[test]
    fn test_optimization_prompt_lists_five_axes() {
        let prompt = optimization_prompt("for i in 0..n {}", "rust");

        assert!(prompt.contains("Performance"));
        assert!(prompt.contains("readability"));
        assert!(prompt.contains("Best practices"));
        assert!(prompt.contains("Security"));
        assert!(prompt.contains("Memory"));
        assert!(prompt.contains("for i in 0..n {}"));
    }

    #[test]
    fn test_optimization_prompt_requests_code_and_rationale() {
        let prompt = optimization_prompt("x", "javascript");

        assert!(prompt.contains("optimized code in a code block"));
        assert!(prompt.contains("brief explanation"));
    }
}
