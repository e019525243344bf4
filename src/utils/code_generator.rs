use rand::Rng;

/// 生成6位数字访问码，均匀分布在 100000..=999999，非密码学随机
pub fn generate_access_code() -> String {
    let mut rng = rand::thread_rng();
    rng.gen_range(100000..=999999).to_string()
}
