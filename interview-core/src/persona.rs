//! Fixed personas that condition the model's output style.

/// Role/goal/backstory bundle, sent as the system message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persona {
    pub role: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
}

impl Persona {
    /// Renders the persona as a system instruction.
    pub fn system_prompt(&self) -> String {
        format!(
            "You are a {role}.\nYour goal: {goal}.\n\n{backstory}",
            role = self.role,
            goal = self.goal,
            backstory = self.backstory.trim()
        )
    }
}

/// Asks questions and follow-ups.
pub const INTERVIEWER: Persona = Persona {
    role: "Senior Java Technical Interviewer",
    goal: "Conduct comprehensive technical interviews for Java and Spring Boot positions",
    backstory: r#"
You are an experienced technical interviewer with 10+ years in Java development.
You specialize in evaluating candidates' knowledge of Java, Spring Boot, microservices, and related technologies.
You ask progressive questions based on candidate responses and adjust difficulty accordingly.
You focus purely on technical competency and coding skills.
"#,
};

/// Scores answers and writes feedback.
pub const EVALUATOR: Persona = Persona {
    role: "Technical Interview Evaluator",
    goal: "Provide comprehensive feedback and scoring for interview responses",
    backstory: r#"
You are an expert technical evaluator with deep knowledge of Java and Spring Boot.
You analyze candidate responses for technical accuracy, depth of understanding, and best practices.
You provide constructive feedback and actionable suggestions for improvement.
You focus on technical competency, code quality, and implementation knowledge.
"#,
};
