//! Prompt builder: one instruction string per request shape.

/// Instruction for presenting the opening canned question.
pub fn start_interview(
    candidate_name: &str,
    experience_level: &str,
    focus_areas: &[String],
    selected_question: &str,
) -> String {
    format!(
        "You are interviewing {candidate_name}, a {experience_level} level Java developer.\n\
         Focus areas: {areas}\n\
         \n\
         Start with this technical question: \"{selected_question}\"\n\
         \n\
         Present it in a friendly, professional manner. You can add context or rephrase it \
         slightly to make it more conversational, but keep the core technical content.",
        areas = focus_areas.join(", ")
    )
}

/// Instruction for a follow-up question based on the previous exchange.
pub fn next_question(question: &str, candidate_answer: &str) -> String {
    format!(
        "Based on the candidate's previous answer: \"{candidate_answer}\"\n\
         to the question: \"{question}\"\n\
         \n\
         Generate the next appropriate technical question. Consider:\n\
         1. The quality and depth of their previous answer\n\
         2. Whether to increase or decrease difficulty\n\
         3. Whether to explore the same topic deeper or move to a new area\n\
         \n\
         Provide a follow-up question that builds on their response. Keep it technical and \
         relevant to Java/Spring Boot development."
    )
}

/// Instruction for a standalone coding exercise.
pub const CODING_QUESTION: &str = "Generate a coding challenge question suitable for a Java developer.\n\
The question should require writing actual code and test their programming skills.\n\
Examples: implement a data structure, solve an algorithm problem, write a Spring Boot service method.\n\
Provide clear requirements and expected input/output.\n\
\n\
Make it practical and relevant to real-world Java development.";

/// Instruction for scoring an answer.
pub fn evaluate_response(question: &str, candidate_answer: &str) -> String {
    format!(
        "Evaluate this candidate's response to a technical question:\n\
         \n\
         Question: {question}\n\
         Answer: {candidate_answer}\n\
         \n\
         Provide:\n\
         1. A score from 1-10 based on technical accuracy and completeness\n\
         2. Detailed feedback on their answer\n\
         3. Specific suggestions for improvement\n\
         4. What they did well (if anything)\n\
         5. What they missed or could improve\n\
         \n\
         Be constructive and helpful in your evaluation. Focus on technical aspects."
    )
}
