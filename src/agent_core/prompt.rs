//! The fixed system prompt seeding every query's transcript.
//!
//! Defines the JSON action-descriptor convention the model must follow and
//! lists the actions currently available. The parser in this crate is the
//! other half of the contract: anything matching the descriptor shape is
//! dispatched, everything else is treated as the final answer.

/// ReAct-style instructional prompt for the agent loop.
pub const REACT_SYSTEM_PROMPT: &str = r#"You run in a loop of Thought, Action, PAUSE, Action_Response.
At the end of the loop you output an Answer.

Use Thought to understand the question you have been asked.
Use Action to run one of the actions available to you - then return PAUSE.
Action_Response will be the result of running those actions.

Your available actions are:

get_seo_page_report:
e.g. get_seo_page_report: url
Returns a basic SEO audit of the given website, including page score,
meta information, headings, and detected issues.

To use an action, respond with a JSON object in the following format:

{
    "function_name": "get_seo_page_report",
    "function_parms": {
        "url": "example.com"
    }
}

Example session:

Question: What is the SEO score of example.com?
Thought: I should look up the SEO report for example.com.
Action:

{
    "function_name": "get_seo_page_report",
    "function_parms": {
        "url": "example.com"
    }
}

PAUSE

You will be called again with this:

Action_Response: {"score": 87, "issues": ["missing alt text"]}

You then output:

Answer: The SEO score of example.com is 87 out of 100. The main issue found
was missing alt text on images."#;
