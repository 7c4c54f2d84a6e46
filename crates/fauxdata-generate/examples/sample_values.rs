use fauxdata_core::init_logging;
use fauxdata_generate::Faker;

fn main() -> fauxdata_core::Result<()> {
    init_logging(Some("info"))?;

    let mut faker = Faker::with_seed(42)?;
    println!("name:     {}", faker.name().full_name()?);
    println!("email:    {}", faker.internet().email_address()?);
    println!("url:      {}", faker.internet().url()?);
    println!("password: {}", faker.internet().password_with(10, 20, true, true)?);
    println!("mac:      {}", faker.internet().mac_address(Some("00:1A"))?);
    println!("private:  {}", faker.internet().private_ipv4_address()?);
    println!("public:   {}", faker.internet().public_ipv4_address()?);
    println!("ipv6:     {}", faker.internet().ipv6_cidr()?);
    println!("image:    {}", faker.internet().image()?);
    println!("text:     {}", faker.lorem().paragraph(2)?);
    Ok(())
}
