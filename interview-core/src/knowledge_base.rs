//! Canned Java / Spring Boot interview questions keyed by (topic, level).
//!
//! Lookups are pure and total: any pair not in the table yields the
//! one-element [`NOT_FOUND`] list.

/// Placeholder returned for unknown (topic, level) pairs.
pub const NOT_FOUND: &str = "No questions found for the specified topic and level";

/// Topic used when a request names no focus area.
pub const DEFAULT_TOPIC: &str = "core_java";

const TOPICS: &[&str] = &["core_java", "spring_boot", "microservices", "database", "testing"];

fn table(topic: &str, level: &str) -> Option<&'static [&'static str]> {
    let questions: &'static [&'static str] = match (topic, level) {
        ("core_java", "junior") => &[
            "What is the difference between JDK, JRE, and JVM?",
            "Explain the concept of Object-Oriented Programming in Java.",
            "What are the access modifiers in Java?",
            "What is the difference between == and equals() method?",
            "Explain method overloading vs method overriding.",
        ],
        ("core_java", "mid") => &[
            "Explain the Java Memory Model and garbage collection.",
            "What are design patterns? Implement Singleton pattern.",
            "Discuss multithreading in Java and synchronization.",
            "Explain exception handling hierarchy in Java.",
            "What are Java 8 features like Streams and Lambda expressions?",
        ],
        ("core_java", "senior") => &[
            "Explain JVM internals and memory management strategies.",
            "Discuss concurrent programming and java.util.concurrent package.",
            "How would you optimize Java application performance?",
            "Explain reflection and its use cases in frameworks.",
            "Discuss design patterns used in enterprise applications.",
        ],
        ("spring_boot", "junior") => &[
            "What is Spring Boot and its advantages?",
            "Explain dependency injection in Spring.",
            "What are Spring Boot annotations like @Component, @Service?",
            "How do you create a REST API in Spring Boot?",
            "What is application.properties file used for?",
        ],
        ("spring_boot", "mid") => &[
            "Explain Spring Boot auto-configuration mechanism.",
            "What are different ways to configure Spring Boot application?",
            "Discuss Spring Data JPA and its benefits.",
            "How do you handle exceptions in Spring Boot?",
            "Explain Spring Boot Actuator and its endpoints.",
        ],
        ("spring_boot", "senior") => &[
            "How would you implement microservices with Spring Boot?",
            "Discuss Spring Cloud components for distributed systems.",
            "Explain transaction management in Spring Boot.",
            "How do you implement security in Spring Boot applications?",
            "Discuss performance optimization strategies for Spring Boot apps.",
        ],
        ("microservices", "mid") => &[
            "What are microservices and their advantages?",
            "How do you handle inter-service communication?",
            "Explain service discovery patterns.",
            "What is circuit breaker pattern?",
            "How do you manage configuration in microservices?",
        ],
        ("microservices", "senior") => &[
            "Design a microservices architecture for an e-commerce platform.",
            "How do you handle distributed transactions?",
            "Explain event-driven architecture in microservices.",
            "Discuss monitoring and observability in microservices.",
            "How do you implement API gateway pattern?",
        ],
        ("database", "junior") => &[
            "What is the difference between SQL and NoSQL databases?",
            "Explain JDBC and how to connect to a database in Java.",
            "What are primary keys and foreign keys?",
            "How do you perform CRUD operations with Spring Data JPA?",
            "What is the difference between @Entity and @Table annotations?",
        ],
        ("database", "mid") => &[
            "Explain database connection pooling and its benefits.",
            "What are JPA relationships and how do you map them?",
            "Discuss transaction management in Spring Boot.",
            "How do you optimize database queries in JPA?",
            "Explain the difference between lazy and eager loading.",
        ],
        ("database", "senior") => &[
            "How would you handle database migrations in production?",
            "Discuss database sharding and partitioning strategies.",
            "How do you implement database caching strategies?",
            "Explain distributed transaction patterns like Saga.",
            "How do you monitor and optimize database performance?",
        ],
        ("testing", "junior") => &[
            "What is unit testing and why is it important?",
            "How do you write unit tests with JUnit?",
            "What is the difference between @Test and @TestMethodOrder?",
            "How do you test REST APIs in Spring Boot?",
            "What are assertions in testing?",
        ],
        ("testing", "mid") => &[
            "Explain mocking and how to use Mockito.",
            "What is integration testing vs unit testing?",
            "How do you test Spring Boot applications with @SpringBootTest?",
            "Discuss test-driven development (TDD) approach.",
            "How do you test database layers with @DataJpaTest?",
        ],
        ("testing", "senior") => &[
            "How do you implement comprehensive testing strategies?",
            "Discuss contract testing and consumer-driven contracts.",
            "How do you test microservices interactions?",
            "Explain performance testing and load testing approaches.",
            "How do you implement continuous testing in CI/CD pipelines?",
        ],
        _ => return None,
    };
    Some(questions)
}

/// Returns the canned questions for `(topic, level)`, in table order.
///
/// Unknown pairs return `[NOT_FOUND]`, never an empty list.
pub fn lookup(topic: &str, level: &str) -> Vec<String> {
    match table(topic, level) {
        Some(questions) => questions.iter().map(|q| q.to_string()).collect(),
        None => vec![NOT_FOUND.to_string()],
    }
}

/// True if `questions` is the sentinel list for an unknown pair.
pub fn is_sentinel(questions: &[String]) -> bool {
    matches!(questions, [only] if only == NOT_FOUND)
}

/// Topics present in the table.
pub fn topics() -> &'static [&'static str] {
    TOPICS
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: [&str; 3] = ["junior", "mid", "senior"];

    #[test]
    fn junior_core_java_in_order() {
        assert_eq!(
            lookup("core_java", "junior"),
            vec![
                "What is the difference between JDK, JRE, and JVM?",
                "Explain the concept of Object-Oriented Programming in Java.",
                "What are the access modifiers in Java?",
                "What is the difference between == and equals() method?",
                "Explain method overloading vs method overriding.",
            ]
        );
    }

    #[test]
    fn every_known_cell_has_five_questions() {
        for topic in topics() {
            for level in LEVELS {
                let qs = lookup(topic, level);
                if *topic == "microservices" && level == "junior" {
                    assert!(is_sentinel(&qs));
                } else {
                    assert_eq!(qs.len(), 5, "{topic}/{level}");
                    assert!(!is_sentinel(&qs));
                }
            }
        }
    }

    #[test]
    fn unknown_pairs_return_sentinel() {
        for (topic, level) in [
            ("rust", "junior"),
            ("core_java", "principal"),
            ("", ""),
            ("Core_Java", "junior"),
        ] {
            assert_eq!(lookup(topic, level), vec![NOT_FOUND.to_string()]);
        }
    }

    #[test]
    fn spot_check_other_cells() {
        assert_eq!(
            lookup("microservices", "senior")[0],
            "Design a microservices architecture for an e-commerce platform."
        );
        assert_eq!(
            lookup("testing", "mid")[4],
            "How do you test database layers with @DataJpaTest?"
        );
    }
}
