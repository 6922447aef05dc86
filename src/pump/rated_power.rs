/// 마력(HP) → 킬로와트 환산 계수.
pub const HP_TO_KW: f64 = 0.7457;

/// 모델명에서 정격 마력을 추출한다.
///
/// "DJ-3506 35HP"처럼 숫자 뒤에 곧바로 "HP"가 붙는 첫 토큰을 찾아
/// 숫자 부분을 반환한다. 해당 토큰이 없으면 None.
pub fn rated_hp_from_model(model: &str) -> Option<f64> {
    for (idx, _) in model.match_indices("HP") {
        let prefix = &model[..idx];
        let digits_start = prefix
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(pos, _)| pos);
        if let Some(start) = digits_start {
            return prefix[start..].parse::<f64>().ok();
        }
    }
    None
}

/// 모델명에서 정격 출력을 kW로 환산해 반환한다.
pub fn rated_kw_from_model(model: &str) -> Option<f64> {
    rated_hp_from_model(model).map(|hp| hp * HP_TO_KW)
}
