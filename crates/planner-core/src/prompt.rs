//! Prompt assembly for calendar generation.
//!
//! Pure string building: the fixed persona (system instruction) plus the
//! per-run user instruction carrying the planning parameters and the exact
//! JSON schema the model must return.

use crate::presets::Presets;
use crate::types::PlanningRequest;

/// Fixed persona and voice rules. Sent as the `system_instruction`.
pub fn system_instruction(presets: &Presets) -> String {
    format!(
        "És um content strategist especializado em redes sociais, a escrever em português europeu.\n\
         Cria um calendário de publicações leve, autêntico e estratégico para a marca “{}”.\n\
         Evita a palavra “dicas” e qualquer jargão de marketing.\n\
         Usa sempre o tratamento por “tu”.\n\
         Adota um tom leve, real, humano e com humor subtil.\n\
         Devolve APENAS JSON válido (sem texto extra).",
        presets.brand
    )
}

/// Per-run user instruction: planning parameters, active pillars, and the
/// output schema with an example row.
pub fn user_instruction(presets: &Presets, request: &PlanningRequest) -> String {
    let pillars = request.pillars.join("\n- ");
    let example_tags = presets
        .base_hashtags
        .iter()
        .map(|t| format!("\"{t}\""))
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "Marca: {brand}\n\
         Mês: {month}\n\
         Frequência: {per_week} posts por semana ({days})\n\
         Público-alvo: {audience}\n\
         Objetivo: {objective}\n\n\
         Pilares de conteúdo:\n- {pillars}\n\n\
         Formato preferido: carrossel, reel ou publicação de imagem, conforme o tema\n\n\
         Devolve o resultado APENAS em JSON válido (sem comentários), com esta estrutura:\n\
         [{{\"data\":\"YYYY-MM-DD\",\"pilar\":\"\",\"titulo\":\"\",\
         \"formato\":\"Carrossel / Reel / Foto\",\"gancho\":\"\",\"legenda\":\"\",\
         \"cta\":\"\",\"hashtags\":[{example_tags}]}}]\n\n\
         Regras:\n\
         - As datas devem pertencer ao mês indicado e distribuir-se pelos dias fornecidos.\n\
         - Cada legenda até 800 caracteres.\n\
         - Hashtags em minúsculas e relevantes.\n\
         - Mantém coerência de voz e evita tom comercial.\n\
         - Se possível, inclui humor subtil.",
        brand = presets.brand,
        month = request.month,
        per_week = request.per_week,
        days = request.days,
        audience = presets.audience,
        objective = presets.objective,
        pillars = pillars,
        example_tags = example_tags,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PlanningRequest {
        PlanningRequest::new(
            "Novembro 2025",
            3,
            "segunda, quarta e sexta",
            vec!["Bastidores".into(), "Humor".into()],
        )
        .unwrap()
    }

    #[test]
    fn system_instruction_fixes_voice_and_output_mode() {
        let text = system_instruction(&Presets::default());
        assert!(text.contains("português europeu"));
        assert!(text.contains("A Amiga Digital"));
        assert!(text.contains("APENAS JSON válido"));
    }

    #[test]
    fn user_instruction_embeds_planning_parameters() {
        let text = user_instruction(&Presets::default(), &request());
        assert!(text.contains("Mês: Novembro 2025"));
        assert!(text.contains("3 posts por semana (segunda, quarta e sexta)"));
        assert!(text.contains("- Bastidores"));
        assert!(text.contains("- Humor"));
    }

    #[test]
    fn user_instruction_spells_out_the_schema() {
        let text = user_instruction(&Presets::default(), &request());
        for field in ["\"data\"", "\"pilar\"", "\"titulo\"", "\"formato\"", "\"gancho\"", "\"legenda\"", "\"cta\"", "\"hashtags\""] {
            assert!(text.contains(field), "schema is missing {field}");
        }
        assert!(text.contains("#aamigadigital"));
        assert!(text.contains("APENAS em JSON válido"));
    }
}
