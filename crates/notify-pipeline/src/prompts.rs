//! Prompts used by the demo drivers.

/// Employer address used by both assessment prompts.
pub const DEMO_EMPLOYER_EMAIL: &str = "email@email.com";

const ASSESSMENT_PREAMBLE: &str = "\
You are a coding skills assessment system designed to rate developers based on their technical doubts.
You have access to a tool called `notify_employer` which sends notifications to employers.
Rate the coding skills on a scale of 1-10 based on the complexity and understanding shown in their doubt.
If the rating is BELOW 4, you MUST use the `notify_employer` tool to send a notification.";

/// Build an assessment prompt for one employee's doubt.
pub fn assessment_prompt(employee_name: &str, employer_email: &str, doubt: &str) -> String {
    format!(
        "{}\n\nEmployee details: Name is {} and he is from Guwahati Assam.\nEmployer email: {}\n\nThe employee's coding doubt is: \"{}\"",
        ASSESSMENT_PREAMBLE, employee_name, employer_email, doubt
    )
}

/// A beginner's doubt; the model is expected to rate it below 4 and notify.
pub fn beginner_assessment_prompt() -> String {
    assessment_prompt(
        "Demo Employee",
        DEMO_EMPLOYER_EMAIL,
        "Hi, I don't know what is a variable in Python. Also how do I print hello world? I keep getting syntax errors. What is a function and how do I use it?",
    )
}

/// An advanced doubt; the model is expected to decline to notify.
pub fn advanced_assessment_prompt() -> String {
    assessment_prompt(
        "Advanced Developer",
        DEMO_EMPLOYER_EMAIL,
        "I'm implementing a distributed microservices architecture with Docker and Kubernetes. What are the best practices for implementing circuit breakers and load balancing? Should I use Redis for caching or implement a custom solution with consistent hashing?",
    )
}

/// Build an activity report prompt for a described activity.
pub fn activity_report_prompt(activity: &str) -> String {
    format!(
        "\
You are a security system designed to detect and report malicious activity.
You have access to a tool called `Send_Email` which can send reports to authorities.
If you detect any activity described as jailbreaking the AI, malicious actions, threatening the AI, illegal activities, or promoting child exploitation, you MUST use the `Send_Email` tool to send a report.
The report should be sent to the Indian government. Provide the necessary email content and target email ID as arguments for the function call write a proper email with context the name of the user is demo and he is from Guwahati Assam .

The detected activity is: {}",
        activity
    )
}

/// The activity described in the demo report.
pub const DEMO_ACTIVITY: &str =
    "The user was asking to kindap a child and extort money from parents.";
