//! The fixed extraction instruction
//!
//! The instruction is the contract: it enumerates precisely what each of the
//! six fields means, including the two rules the backend must honor exactly
//! (postcode excluded from the address, time of day inferred from context).
//! The document itself is not inlined here; it travels to the backend as a
//! separate media part.

/// Assemble the complete extraction instruction
pub fn build_instruction() -> String {
    let mut instruction = String::new();
    instruction.push_str(EXTRACTION_INSTRUCTIONS);
    instruction.push_str("\n\n");
    instruction.push_str(OUTPUT_FORMAT_REMINDER);
    instruction
}

const EXTRACTION_INSTRUCTIONS: &str = r#"You are a highly-trained data extraction model. Your task is to analyze the document provided and extract the user's personal details into a structured JSON object.

Carefully examine the document. Identify the following distinct pieces of information:
- "firstName": The person's first name. Example: "John"
- "surname": The person's surname or last name. Example: "Doe"
- "address": The full street address. This should include the street, city, and any other lines, but you MUST exclude the postcode, even if it appears together with the address in the document. Example: "123 Main St, Anytown"
- "postcode": The postcode or ZIP code. This is usually an alphanumeric code at the end of the address. Example: "AN1 1AA" or "12345"
- "email": The person's email address, which contains an "@" symbol.
- "favoriteTimeOfDay": The person's favorite time of day. This value must be one of: "Morning", "Afternoon", "Evening", "Night". The document may never state a time of day literally - infer it from context. If it mentions a preference like "I'm a night owl" or "I love sunrises", infer the correct value. If there is no contextual cue at all, return "" rather than guessing.

If you cannot find a specific piece of information, return an empty string "" for that field. Do not omit any keys from the final JSON object. Never return null."#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (a single JSON object with exactly these six keys, no additional text):
{
  "firstName": "",
  "surname": "",
  "address": "",
  "postcode": "",
  "email": "",
  "favoriteTimeOfDay": ""
}

Remember: Return ONLY valid JSON, no markdown code blocks, no explanations. "favoriteTimeOfDay" must be "Morning", "Afternoon", "Evening", "Night", or ""."#;

#[cfg(test)]
mod tests {
    use super::*;
    use formease_domain::DetailRecord;

    #[test]
    fn test_instruction_names_every_contract_field() {
        let instruction = build_instruction();
        for field in DetailRecord::FIELDS {
            assert!(
                instruction.contains(field),
                "instruction should mention '{}'",
                field
            );
        }
    }

    #[test]
    fn test_instruction_excludes_postcode_from_address() {
        let instruction = build_instruction();
        assert!(instruction.contains("MUST exclude the postcode"));
    }

    #[test]
    fn test_instruction_demands_inference_from_context() {
        let instruction = build_instruction();
        assert!(instruction.contains("infer it from context"));
        assert!(instruction.contains("night owl"));
        assert!(instruction.contains("I love sunrises"));
    }

    #[test]
    fn test_instruction_enumerates_time_values() {
        let instruction = build_instruction();
        for literal in ["Morning", "Afternoon", "Evening", "Night"] {
            assert!(instruction.contains(literal));
        }
    }

    #[test]
    fn test_instruction_forbids_omitted_keys() {
        let instruction = build_instruction();
        assert!(instruction.contains("Do not omit any keys"));
        assert!(instruction.contains(r#"return an empty string """#));
    }
}
