/// Preamble sent before the file metadata and code.
pub const ANALYSIS_ROLE_PROMPT: &str = "You are an expert code reviewer with deep knowledge of software security, performance optimization, and best practices. Analyze the following code and provide detailed feedback.";

/// The response schema the engine is asked to follow. The normalizer
/// tolerates wrapper prose and code fences around it, but not a missing
/// object.
pub const ANALYSIS_FORMAT_PROMPT: &str = r#"Please analyze this code and provide your response in JSON format with the following structure:

{
  "summary": "Brief summary of the analysis",
  "securityScore": 0-100,
  "performanceScore": 0-100,
  "bestPracticesScore": 0-100,
  "issues": [
    {
      "category": "SECURITY|PERFORMANCE|BEST_PRACTICE",
      "severity": "HIGH|MEDIUM|LOW",
      "title": "Issue title",
      "description": "Detailed description",
      "lineNumber": 123,
      "codeSnippet": "Problematic code snippet",
      "recommendation": "How to fix the issue"
    }
  ],
  "suggestions": [
    {
      "type": "REFACTORING|OPTIMIZATION|CONVENTION|ENHANCEMENT",
      "title": "Suggestion title",
      "description": "Detailed suggestion",
      "suggestedCode": "Improved code",
      "benefits": "Benefits of the change",
      "effort": "LOW|MEDIUM|HIGH"
    }
  ]
}

Focus on the following areas:
- Security vulnerabilities
- Performance issues
- Best practices violations
- Code maintainability
- Potential bugs"#;
