/// 入力プレフィックスを出力プレフィックスに置換して出力キーを導出する
///
/// 置換は最初の一致のみ。入力プレフィックスを含まないキーはそのまま返す
pub fn derive_output_key(key: &str, input_prefix: &str, output_prefix: &str) -> String {
    key.replacen(input_prefix, output_prefix, 1)
}
