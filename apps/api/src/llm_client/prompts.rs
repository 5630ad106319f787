// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Common instruction appended to all refinement prompts.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Only use facts present in the candidate's own input. \
    Do NOT invent employers, titles, dates, metrics or technologies. \
    If the input does not support a claim, omit it entirely.";

/// Instruction that pins every refined entry to its input item.
pub const ID_INSTRUCTION: &str = "\
    CRITICAL: Every refined entry MUST carry the exact `id` of the input item it rewrites. \
    Return exactly one entry per input item. Never merge, split, drop or invent items.";
