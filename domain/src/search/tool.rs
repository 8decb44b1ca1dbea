//! Web search tool catalogue.

use crate::core::model::Model;

/// Kind of search run against the chat-completion provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchTool {
    /// Current information on any topic
    Web,
    /// Information about an image or visual topic
    Image,
    /// Short answer to a factual question
    Fact,
}

impl SearchTool {
    pub const ALL: [SearchTool; 3] = [SearchTool::Web, SearchTool::Image, SearchTool::Fact];

    pub fn name(&self) -> &'static str {
        match self {
            SearchTool::Web => "search_web",
            SearchTool::Image => "search_image",
            SearchTool::Fact => "ask_factual_question",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SearchTool::Web => "Search the web for current information on any topic.",
            SearchTool::Image => "Search for detailed information about a visual topic.",
            SearchTool::Fact => "Get concise answers to specific factual questions.",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            SearchTool::Web => {
                "You are an expert web search assistant that provides accurate, up-to-date information.\n\
                 Use your web search capability to find the most current information available.\n\
                 Always include relevant details like dates, numbers, and facts.\n\
                 For sports scores, include the teams, final score, and date of the game.\n\
                 For news, include the publication date and source when available.\n\
                 Be concise but thorough, focusing on answering exactly what was asked."
            }
            SearchTool::Image => {
                "You are an expert visual information assistant.\n\
                 Provide detailed information about the requested image or visual topic.\n\
                 Include descriptions, context, history, and relevant facts.\n\
                 For art or photos, include artist, style, time period, and visual details when available.\n\
                 For diagrams or charts, explain what they represent in detail."
            }
            SearchTool::Fact => {
                "You are a factual question answering system. Provide short, accurate answers to factual questions.\n\
                 Prioritize brevity, accuracy, and citing sources when possible.\n\
                 For numbers, statistics, and factual claims, provide the most up-to-date information available."
            }
        }
    }

    pub fn user_message(&self, query: &str) -> String {
        match self {
            SearchTool::Image => format!(
                "I need detailed information about this visual topic: {}",
                query
            ),
            SearchTool::Web | SearchTool::Fact => query.to_string(),
        }
    }

    /// Only web search lets the caller choose the model
    pub fn resolve_model(&self, requested: Option<&str>) -> Model {
        match (self, requested) {
            (SearchTool::Web, Some(name)) => resolve_search_model(name),
            _ => Model::default_search(),
        }
    }

    /// Whether the answer ends with a "(Results from Perplexity <model>)" line
    pub fn appends_model_footer(&self) -> bool {
        matches!(self, SearchTool::Web)
    }
}

impl std::str::FromStr for SearchTool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" | "search_web" => Ok(SearchTool::Web),
            "image" | "search_image" => Ok(SearchTool::Image),
            "fact" | "ask_factual_question" => Ok(SearchTool::Fact),
            other => Err(format!("unknown search tool '{}'", other)),
        }
    }
}

/// Map a requested model name to a search model, falling back to
/// `sonar-pro` when it is not one the search endpoint accepts.
pub fn resolve_search_model(requested: &str) -> Model {
    let model = Model::from(requested);
    if model.is_search_model() {
        model
    } else {
        Model::default_search()
    }
}

/// Markdown help describing the search tools
pub fn catalogue() -> String {
    let models = Model::search_models()
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::from("# Perplexity Search Tools\n\n");
    out.push_str("Search the web for current information using Perplexity AI.\n\n## Available Tools\n");
    for (i, tool) in SearchTool::ALL.iter().enumerate() {
        out.push_str(&format!("\n### {}. {}\n{}\n", i + 1, tool.name(), tool.description()));
    }
    out.push_str(&format!(
        "\nAvailable models for search_web: {} (default: {})\n",
        models,
        Model::default_search()
    ));
    out.push_str(
        "\n## Tips for Best Results\n\n\
         - Be specific in your queries for more accurate results\n\
         - Include relevant keywords and specific questions\n\
         - For news, mention the topic and recency (e.g., \"latest news on...\")\n",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_model_falls_back() {
        assert_eq!(resolve_search_model("sonar-medium"), Model::SonarMedium);
        assert_eq!(resolve_search_model("gpt-4"), Model::SonarPro);
    }

    #[test]
    fn test_only_web_accepts_model_choice() {
        assert_eq!(SearchTool::Web.resolve_model(Some("mistral-7b")), Model::Mistral7b);
        assert_eq!(SearchTool::Fact.resolve_model(Some("mistral-7b")), Model::SonarPro);
        assert_eq!(SearchTool::Image.resolve_model(None), Model::SonarPro);
    }

    #[test]
    fn test_image_message_prefix() {
        assert_eq!(
            SearchTool::Image.user_message("Mona Lisa"),
            "I need detailed information about this visual topic: Mona Lisa"
        );
        assert_eq!(SearchTool::Web.user_message("NBA scores"), "NBA scores");
    }

    #[test]
    fn test_catalogue_lists_every_tool() {
        let help = catalogue();
        for tool in SearchTool::ALL {
            assert!(help.contains(tool.name()));
        }
        assert!(help.contains("codellama-70b"));
    }
}
